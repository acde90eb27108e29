use super::*;

#[test]
fn same_seed_same_sequence() {
    for seed in [1u32, 7, 21, 1_700_000_000, u32::MAX] {
        let mut a = SeededRandom::new(seed);
        let mut b = SeededRandom::new(seed);
        for _ in 0..256 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}

#[test]
fn zero_seed_does_not_stick_at_zero() {
    let mut r = SeededRandom::new(0);
    let mut fallback = SeededRandom::new(ZERO_SEED_FALLBACK);
    let mut nonzero = 0;
    for _ in 0..64 {
        let v = r.next_u32();
        assert_eq!(v, fallback.next_u32());
        if v != 0 {
            nonzero += 1;
        }
    }
    assert_eq!(nonzero, 64);
}

#[test]
fn first_step_matches_shift_xor_sequence() {
    let mut r = SeededRandom::new(1);
    // 1 ^ (1 << 13) = 8193; 8193 >> 17 = 0; 8193 ^ (8193 << 5) = 270369
    assert_eq!(r.next_u32(), 270_369);
}

#[test]
fn floats_stay_in_unit_interval() {
    let mut r = SeededRandom::new(42);
    for _ in 0..10_000 {
        let v = r.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = SeededRandom::from_unix_secs(1_700_000_000);
    let mut b = SeededRandom::from_unix_secs(1_700_000_001);
    let sa: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
    let sb: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
    assert_ne!(sa, sb);
}

#[test]
fn signed_offset_covers_both_ends() {
    let mut r = SeededRandom::new(9);
    let mut lo = i32::MAX;
    let mut hi = i32::MIN;
    for _ in 0..20_000 {
        let v = r.signed_offset(20);
        assert!((-20..=20).contains(&v));
        lo = lo.min(v);
        hi = hi.max(v);
    }
    assert_eq!((lo, hi), (-20, 20));
}

#[test]
fn index_stays_in_bounds() {
    let mut r = SeededRandom::new(3);
    for _ in 0..1_000 {
        assert!(r.index(4) < 4);
    }
}
