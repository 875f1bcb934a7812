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

/// The default body of every stub trait method.
///
/// New operations get a default implementation so adding them does not break
/// existing implementations of the trait, such as mocks in application tests.
pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    unimplemented!(concat!(
        "this stub method has no implementation. The clients in this SDK ",
        "implement every method, so this only happens with a mock or a custom ",
        "stub that does not implement an operation used by the test. Add an ",
        "implementation, or an expectation in the mock, for that operation."
    ));
}
