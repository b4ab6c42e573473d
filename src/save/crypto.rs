//! Save-file encryption
//!
//! AES-256-CBC with PKCS7 padding. Key and IV are both derived from a
//! fixed passphrase and salt via PBKDF2-HMAC-SHA256: the first 32 bytes of
//! output are the key, the next 16 the IV. There is no authentication tag;
//! corruption surfaces as an unpad failure here or as a JSON parse failure
//! in the store.

use aes::cipher::block_padding::{Pkcs7, UnpadError};
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

const PASSPHRASE: &[u8] = b"greenside-save-data";
const SALT: &[u8] = b"greenside-salt";
const PBKDF2_ROUNDS: u32 = 10_000;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

struct KeyMaterial {
    key: [u8; KEY_LEN],
    iv: [u8; IV_LEN],
}

fn derive_key_material() -> KeyMaterial {
    let mut output = [0u8; KEY_LEN + IV_LEN];
    pbkdf2_hmac::<Sha256>(PASSPHRASE, SALT, PBKDF2_ROUNDS, &mut output);

    let mut material = KeyMaterial {
        key: [0u8; KEY_LEN],
        iv: [0u8; IV_LEN],
    };
    material.key.copy_from_slice(&output[..KEY_LEN]);
    material.iv.copy_from_slice(&output[KEY_LEN..]);
    material
}

/// Encrypt plaintext bytes; output length is padded to the block size
pub(crate) fn encrypt(plaintext: &[u8]) -> Vec<u8> {
    let material = derive_key_material();
    Aes256CbcEnc::new(&material.key.into(), &material.iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt ciphertext bytes; fails on truncated input or bad padding
pub(crate) fn decrypt(ciphertext: &[u8]) -> Result<Vec<u8>, UnpadError> {
    if ciphertext.is_empty() || ciphertext.len() % IV_LEN != 0 {
        return Err(UnpadError);
    }
    let material = derive_key_material();
    Aes256CbcDec::new(&material.key.into(), &material.iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
}
