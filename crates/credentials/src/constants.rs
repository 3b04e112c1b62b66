// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Minimum length for an access key.
pub const ACCESS_KEY_MIN_LEN: usize = 5;

/// Maximum length for an access key.
pub const ACCESS_KEY_MAX_LEN: usize = 20;

/// Minimum length for a secret key.
pub const SECRET_KEY_MIN_LEN: usize = 8;

/// Maximum length for a secret key.
pub const SECRET_KEY_MAX_LEN: usize = 40;

/// Length of generated access keys.
pub const GENERATED_ACCESS_KEY_LEN: usize = ACCESS_KEY_MAX_LEN;

/// Length of generated secret keys.
pub const GENERATED_SECRET_KEY_LEN: usize = SECRET_KEY_MAX_LEN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_length_bounds() {
        assert!(ACCESS_KEY_MIN_LEN < ACCESS_KEY_MAX_LEN);
        assert!(SECRET_KEY_MIN_LEN < SECRET_KEY_MAX_LEN);

        assert!((ACCESS_KEY_MIN_LEN..=ACCESS_KEY_MAX_LEN).contains(&GENERATED_ACCESS_KEY_LEN));
        assert!((SECRET_KEY_MIN_LEN..=SECRET_KEY_MAX_LEN).contains(&GENERATED_SECRET_KEY_LEN));
    }
}
