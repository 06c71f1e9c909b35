use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Error, Result};

fn output_file_for_shader_file(shader_file_path: &Path) -> Result<PathBuf> {
    let parent = shader_file_path.parent().with_context(|| {
        format!(
            "unable to get parent dir for shader at {:?}",
            shader_file_path
        )
    })?;
    let shader_file_name = shader_file_path
        .file_name()
        .with_context(|| {
            format!(
                "Unable to get file name for shader at path {:#?}",
                shader_file_path,
            )
        })?
        .to_str()
        .with_context(|| {
            format!(
                "Unable to get str representation of file name at path {:#?}",
                shader_file_path
            )
        })?;
    let output_file_name = format!("{}.spv", shader_file_name);
    Ok(parent.join(Path::new(&output_file_name)))
}

fn needs_rebuild(shader_file_path: &Path, output_path: &Path) -> Result<bool> {
    if !output_path.try_exists()? {
        return Ok(true);
    }

    let shader_last_modified_time =
        std::fs::metadata(shader_file_path)?.modified()?;
    let output_last_modified_time =
        std::fs::metadata(output_path)?.modified()?;

    Ok(shader_last_modified_time > output_last_modified_time)
}

/// Compile a single GLSL file with glslc.
///
/// Returns false when glslc could not be found on the PATH.
fn compile_shader(shader_file_path: &Path) -> Result<bool> {
    let shader_path_str = shader_file_path.to_string_lossy();
    println!("cargo:rerun-if-changed={}", shader_path_str);

    let output_path = output_file_for_shader_file(shader_file_path)?;
    if !needs_rebuild(shader_file_path, &output_path).unwrap_or(true) {
        return Ok(true);
    }

    let result = Command::new("glslc")
        .arg(shader_file_path)
        .arg("-o")
        .arg(&output_path)
        .arg("--target-env=vulkan1.2")
        .output();

    let output = match result {
        Ok(output) => output,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
        Err(err) => {
            return Err(Error::new(err).context("Unable to run glslc"));
        }
    };

    if !output.status.success() {
        eprintln!("{}", String::from_utf8_lossy(&output.stdout));
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        return Err(Error::msg(format!(
            "Error running glslc for shader at {:#?}",
            shader_file_path,
        )));
    }

    println!(
        "cargo:warning={} -> {}",
        shader_path_str,
        output_path.to_string_lossy()
    );
    Ok(true)
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=shaders");

    let all_paths = glob::glob("./shaders/**/*.vert")?
        .chain(glob::glob("./shaders/**/*.frag")?);
    for path_entry in all_paths {
        let path = path_entry?;
        if !compile_shader(&path)? {
            println!(
                "cargo:warning=glslc was not found, {} was not compiled",
                path.to_string_lossy()
            );
        }
    }

    Ok(())
}
