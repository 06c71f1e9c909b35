use std::{
    ffi::{CString, NulError},
    os::raw::c_char,
};

/// Build a vector of pointers to c-style strings from a vector of rust strings.
///
/// The returned pointers are only valid while the returned cstrings are alive.
pub fn to_os_ptrs(
    strings: &[String],
) -> Result<(Vec<CString>, Vec<*const c_char>), NulError> {
    let cstrings = strings
        .iter()
        .cloned()
        .map(CString::new)
        .collect::<Result<Vec<CString>, NulError>>()?;
    let ptrs = cstrings
        .iter()
        .map(|cstr| cstr.as_ptr())
        .collect::<Vec<*const c_char>>();
    Ok((cstrings, ptrs))
}

/// Read a fixed-size, nul-terminated name array (like the ones in
/// vk::ExtensionProperties) into an owned string.
pub fn name_to_string(raw_name: &[c_char]) -> String {
    let bytes: Vec<u8> = raw_name
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_ptrs_point_at_the_owned_strings() {
        let names = vec!["VK_KHR_surface".to_owned(), "other".to_owned()];
        let (cstrings, ptrs) = to_os_ptrs(&names).unwrap();
        assert_eq!(ptrs.len(), 2);
        assert_eq!(cstrings[1].to_str().unwrap(), "other");
        assert_eq!(ptrs[0], cstrings[0].as_ptr());
    }

    #[test]
    fn interior_nul_is_rejected() {
        let names = vec!["bad\0name".to_owned()];
        assert!(to_os_ptrs(&names).is_err());
    }

    #[test]
    fn name_stops_at_the_first_nul() {
        let mut raw = [0 as c_char; 16];
        for (i, b) in b"VK_EXT".iter().enumerate() {
            raw[i] = *b as c_char;
        }
        assert_eq!(name_to_string(&raw), "VK_EXT");
        assert_eq!(name_to_string(&[0 as c_char; 4]), "");
    }
}
