use std::fmt;

/// Wrapper for &[T] which can be pretty-printed as a markdown-style list.
/// Nice for multiline logs which include lists.
pub struct PrettyList<'data, T>(pub &'data [T]);

impl<'data, T> fmt::Debug for PrettyList<'data, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n")?;
        for entry in self.0 {
            if f.alternate() {
                f.write_fmt(format_args!("- {:#?}\n", entry))?;
            } else {
                f.write_fmt(format_args!("- {:?}\n", entry))?;
            }
        }
        Ok(())
    }
}

impl<'data, T> fmt::Display for PrettyList<'data, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\n")?;
        for entry in self.0 {
            f.write_fmt(format_args!("- {}\n", entry))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PrettyList;

    #[test]
    fn display_renders_one_bullet_per_entry() {
        let names = ["VK_KHR_surface", "VK_EXT_debug_utils"];
        assert_eq!(
            format!("{}", PrettyList(&names)),
            "\n- VK_KHR_surface\n- VK_EXT_debug_utils\n"
        );
    }

    #[test]
    fn debug_renders_quoted_entries() {
        let names = vec!["a".to_owned()];
        assert_eq!(format!("{:?}", PrettyList(&names)), "\n- \"a\"\n");
    }

    #[test]
    fn empty_lists_render_a_single_newline() {
        let empty: [u32; 0] = [];
        assert_eq!(format!("{:?}", PrettyList(&empty)), "\n");
    }
}
