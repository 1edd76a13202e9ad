//! Encrypts a message in one shot and again in pieces, then decrypts it.

use aes_ctr::{process, Aes128Ctr};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn main() -> Result<(), aes_ctr::CtrError> {
    // Deterministic seed for reproducibility in the example.
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let counter = rng.next_u32() as u64;

    let message = b"first block here, then a short tail";
    let ciphertext = process(&key, message, counter)?;

    let mut streamed = message.to_vec();
    let mut ctx = Aes128Ctr::new(&key, counter)?;
    let (head, tail) = streamed.split_at_mut(5);
    ctx.apply_keystream(head)?;
    ctx.apply_keystream(tail)?;
    assert_eq!(streamed, ciphertext);

    let decrypted = process(&key, &ciphertext, counter)?;
    assert_eq!(&decrypted[..], &message[..]);

    println!("example succeeded; streamed and one-shot ciphertexts match");
    Ok(())
}
