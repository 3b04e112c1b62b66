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

use crate::{
    ACCESS_KEY_MAX_LEN, ACCESS_KEY_MIN_LEN, GENERATED_ACCESS_KEY_LEN, GENERATED_SECRET_KEY_LEN, SECRET_KEY_MAX_LEN,
    SECRET_KEY_MIN_LEN,
};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Result<T> = core::result::Result<T, CredentialsError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("access key length should be between 5 and 20, got {0}")]
    InvalidAccessKeyLength(usize),

    #[error("secret key length should be between 8 and 40, got {0}")]
    InvalidSecretKeyLength(usize),

    #[error("key length {0} is too short to generate")]
    KeyTooShort(usize),
}

/// checks the access key against the length policy.
pub fn is_access_key_valid(access_key: &str) -> bool {
    (ACCESS_KEY_MIN_LEN..=ACCESS_KEY_MAX_LEN).contains(&access_key.len())
}

/// checks the secret key against the length policy.
pub fn is_secret_key_valid(secret_key: &str) -> bool {
    (SECRET_KEY_MIN_LEN..=SECRET_KEY_MAX_LEN).contains(&secret_key.len())
}

/// Generates a random access key of the specified length.
///
/// # Errors
/// This function will return an error if the specified length is less than 3.
pub fn gen_access_key(length: usize) -> Result<String> {
    const ALPHA_NUMERIC_TABLE: [char; 36] = [
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N',
        'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ];

    if length < 3 {
        return Err(CredentialsError::KeyTooShort(length));
    }

    let mut rng = rand::rng();
    let result = (0..length)
        .map(|_| ALPHA_NUMERIC_TABLE[rng.random_range(0..ALPHA_NUMERIC_TABLE.len())])
        .collect();

    Ok(result)
}

/// Generates a random secret key of the specified length.
///
/// # Errors
/// This function will return an error if the specified length is less than 8.
pub fn gen_secret_key(length: usize) -> Result<String> {
    use base64_simd::URL_SAFE_NO_PAD;

    if length < 8 {
        return Err(CredentialsError::KeyTooShort(length));
    }
    let mut rng = rand::rng();

    let mut key = vec![0u8; URL_SAFE_NO_PAD.estimated_decoded_length(length)];
    rng.fill_bytes(&mut key);

    let mut encoded = URL_SAFE_NO_PAD.encode_to_string(&key).replace('/', "+");
    encoded.truncate(length);

    Ok(encoded)
}

/// Root credentials the server authenticates requests against.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"*REDACTED*")
            .finish()
    }
}

impl Credentials {
    /// builds credentials from the given keys, enforcing the length policy.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        let cred = Credentials {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        };
        cred.validate()?;

        Ok(cred)
    }

    /// generates a fresh random key pair.
    pub fn generate() -> Result<Self> {
        Ok(Credentials {
            access_key: gen_access_key(GENERATED_ACCESS_KEY_LEN)?,
            secret_key: gen_secret_key(GENERATED_SECRET_KEY_LEN)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !is_access_key_valid(&self.access_key) {
            return Err(CredentialsError::InvalidAccessKeyLength(self.access_key.len()));
        }
        if !is_secret_key_valid(&self.secret_key) {
            return Err(CredentialsError::InvalidSecretKeyLength(self.secret_key.len()));
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
