use std::error::Error;
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    // Source tarballs have no git metadata, fall back to a fixed describe string
    let emitted = EmitBuilder::builder()
        .fail_on_error()
        .custom_build_rs(".")
        .git_describe(true, true, None)
        .emit();
    if emitted.is_err() {
        println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown");
    }
    Ok(())
}
