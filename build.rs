// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Release pipelines stamp the builder name into `bartle version`.
    println!("cargo:rerun-if-env-changed=BARTLE_BUILT_BY");

    // Full SHA for `version --json`; the human output shortens it.
    EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()?;
    Ok(())
}
