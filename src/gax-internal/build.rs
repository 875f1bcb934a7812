// Copyright 2026 The IBM Cloud Rust SDK Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Records the compiler version, reported in the `User-Agent` header.
fn main() -> std::io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR")
        .ok_or_else(|| std::io::Error::other("OUT_DIR is not set"))?;
    let version = rustc_version::version().map_err(std::io::Error::other)?;
    let contents = format!("pub(crate) const RUSTC_VERSION: &str = \"{version}\";\n");
    std::fs::write(std::path::Path::new(&out_dir).join("build_env.rs"), contents)
}
