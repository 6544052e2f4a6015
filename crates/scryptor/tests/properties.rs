// Copyright (c) 2026 scryptor contributors
// SPDX-License-Identifier: MIT

//! Universally-quantified round-trip and rejection properties,
//! checked with `proptest`. Cases that drive the actual `scrypt` kernel use
//! a fixed minimal `N` and a reduced case count: the property being checked
//! is the assembly of codec + kernel + comparison, not KDF correctness
//! (that's the KAT suite's job), so there is nothing to gain from a large
//! cost factor here beyond wall time.

use proptest::prelude::*;

proptest! {
    #[test]
    fn codec_round_trips_for_any_valid_record(
        t in 1u32..=20,
        r in 1u32..=255,
        p in 1u32..=255,
        salt in prop::collection::vec(any::<u8>(), 1..=16),
        hash in prop::collection::vec(any::<u8>(), 64..=64),
    ) {
        let n = 1u64 << t;
        let encoded = scryptor_codec::encode(n, r, p, &salt, &hash).unwrap();
        let decoded = scryptor_codec::decode(&encoded).unwrap();

        prop_assert_eq!(decoded.n, n);
        prop_assert_eq!(decoded.r, r);
        prop_assert_eq!(decoded.p, p);
        prop_assert_eq!(decoded.salt, salt);
        prop_assert_eq!(decoded.hash, hash);

        let re_encoded = scryptor_codec::encode(decoded.n, decoded.r, decoded.p, &decoded.salt, &decoded.hash).unwrap();
        prop_assert_eq!(re_encoded, encoded);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn verify_accepts_the_password_that_produced_the_hash(
        password in prop::collection::vec(any::<u8>(), 0..=32),
        salt in prop::collection::vec(any::<u8>(), 1..=16),
    ) {
        let mcf = scryptor::hash_password(&password, Some(&salt), 16, 1, 1).unwrap();
        prop_assert!(scryptor::verify_password(&mcf, &password).unwrap());
    }

    #[test]
    fn verify_rejects_a_distinct_password(
        password in prop::collection::vec(any::<u8>(), 1..=32),
        mut other in prop::collection::vec(any::<u8>(), 1..=32),
        salt in prop::collection::vec(any::<u8>(), 1..=16),
    ) {
        // Force `other` to differ from `password` without biasing its
        // distribution beyond that one flipped byte.
        prop_assume!(!other.is_empty());
        other[0] ^= 0xff;
        prop_assume!(other != password);

        let mcf = scryptor::hash_password(&password, Some(&salt), 16, 1, 1).unwrap();
        prop_assert!(!scryptor::verify_password(&mcf, &other).unwrap());
    }
}
