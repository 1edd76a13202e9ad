use aes_core::{encrypt_block, expand_key, Aes128Key, Block};
use aes_ctr::{counter_block, process};

fn block(hex_str: &str) -> Block {
    hex::decode(hex_str)
        .expect("valid hex")
        .try_into()
        .expect("16 bytes")
}

#[test]
fn fips197_block_vectors() {
    let cases = [
        (
            "000102030405060708090a0b0c0d0e0f",
            "00112233445566778899aabbccddeeff",
            "69c4e0d86a7b0430d8cdb78070b4c55a",
        ),
        (
            "2b7e151628aed2a6abf7158809cf4f3c",
            "3243f6a8885a308d313198a2e0370734",
            "3925841d02dc09fbdc118597196a0b32",
        ),
    ];
    for (key, plain, cipher) in cases {
        let round_keys = expand_key(&Aes128Key::from(block(key)));
        assert_eq!(encrypt_block(&block(plain), &round_keys), block(cipher));
    }
}

#[test]
fn counter_block_feeds_the_block_cipher() {
    let key = block("2b7e151628aed2a6abf7158809cf4f3c");
    let round_keys = expand_key(&Aes128Key::from(key));
    let counter = counter_block(0x1234_5678_9abc_def0, 1).expect("fits");
    let expected = encrypt_block(&counter, &round_keys);
    let ks = process(&key, &[0u8; 32], 0x1234_5678_9abc_def0).expect("process");
    assert_eq!(&ks[16..], &expected[..]);
}

#[test]
fn short_message_against_openssl_ctr() {
    // openssl enc -aes-128-ctr -K 2b7e...4f3c -iv 0000000000000000123456789abcdef0
    let key = block("2b7e151628aed2a6abf7158809cf4f3c");
    let ct = process(&key, b"Hello, AES CTR mode!", 0x1234_5678_9abc_def0).expect("process");
    assert_eq!(hex::encode(&ct), "b477381e51fbdf6081a1055dedf044977969756f");
}
