#![allow(dead_code)]

use qrisgen::domain::tlv::HEADER_LEN;
use qrisgen::{Field, Tag, parse};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A static QRIS payload with a valid checksum.
pub const STATIC_QRIS: &str = "00020101021126570011ID.DANA.WWW011893600915302259148102090225914810303UMI51440014ID.CO.QRIS.WWW0215ID10200176114730303UMI5204482953033605802ID5922Warung Sayur Bu Sugeng6010Kab. Demak6105595676304EAE0";

/// `STATIC_QRIS` with an amount of 50000 embedded.
pub const DYNAMIC_50000: &str = "00020101021126570011ID.DANA.WWW011893600915302259148102090225914810303UMI51440014ID.CO.QRIS.WWW0215ID10200176114730303UMI5204482953033605405500005802ID5922Warung Sayur Bu Sugeng6010Kab. Demak6105595676304FB56";

/// `STATIC_QRIS` with an amount of 1250 embedded.
pub const DYNAMIC_1250: &str = "00020101021126570011ID.DANA.WWW011893600915302259148102090225914810303UMI51440014ID.CO.QRIS.WWW0215ID10200176114730303UMI520448295303360540412505802ID5922Warung Sayur Bu Sugeng6010Kab. Demak61055956763040E70";

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_tag(rng: &mut StdRng) -> Tag {
    format!("{:02}", rng.gen_range(0..100))
        .parse()
        .expect("two digits are a valid tag")
}

/// Printable ASCII, the character set QR payload values are drawn from.
pub fn random_value(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range(b' '..=b'~') as char).collect()
}

pub fn random_fields(rng: &mut StdRng, count: usize) -> Vec<Field> {
    (0..count)
        .map(|_| {
            let tag = random_tag(rng);
            Field::new(tag, random_value(rng, 99))
        })
        .collect()
}

/// Total length implied by stepping through `payload` field by field.
pub fn stepped_len(payload: &str) -> usize {
    parse(payload)
        .expect("payload should parse")
        .iter()
        .map(|f| HEADER_LEN + f.value.len())
        .sum()
}
