//! LED bank tests for ledbank-leds

use ledbank_core::{LedError, LedIndex};
use ledbank_leds::{shared_register, LedBank, SharedLedBank};

const ALL_LEDS_ON: u16 = 0xFFFF;
const ALL_LEDS_OFF: u16 = 0x0000;

#[test]
fn test_all_leds_start_off() {
    for initial in [0x0000, 0x0001, 0x8000, 0xA5A5, 0xFFFF] {
        let mut register: u16 = initial;
        LedBank::init(&mut register);
        assert_eq!(register, ALL_LEDS_OFF);
    }
}

#[test]
fn test_turn_on_single_led() {
    let mut register: u16 = 0xFFFF;
    let mut leds = LedBank::init(&mut register);

    leds.turn_on(4).unwrap();
    assert_eq!(*leds.release(), 0x0008);
}

#[test]
fn test_turn_off_single_led() {
    let mut register: u16 = 0xFFFF;
    let mut leds = LedBank::init(&mut register);

    leds.turn_on(4).unwrap();
    leds.turn_off(4).unwrap();
    drop(leds);
    assert_eq!(register, 0x0000);
}

#[test]
fn test_turn_on_and_off_several_leds() {
    let mut register: u16 = 0xFFFF;
    let mut leds = LedBank::init(&mut register);
    assert_eq!(leds.mask(), 0x0000);

    leds.turn_on(4).unwrap();
    assert_eq!(leds.mask(), 0x0008);
    leds.turn_on(6).unwrap();
    assert_eq!(leds.mask(), 0x0028);

    leds.turn_off(4).unwrap();
    leds.turn_off(8).unwrap();
    drop(leds);
    assert_eq!(register, 0x0020);
}

#[test]
fn test_turn_on_all_leds() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);

    leds.set_all(ALL_LEDS_ON);
    drop(leds);
    assert_eq!(register, ALL_LEDS_ON);
}

#[test]
fn test_turn_off_all_leds() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);

    leds.set_all(ALL_LEDS_ON);
    assert_eq!(leds.mask(), ALL_LEDS_ON);
    leds.set_all(ALL_LEDS_OFF);
    drop(leds);
    assert_eq!(register, ALL_LEDS_OFF);
}

#[test]
fn test_turn_on_all_and_off_all_helpers() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);

    leds.turn_on_all();
    assert_eq!(leds.mask(), ALL_LEDS_ON);
    leds.turn_off_all();
    assert_eq!(leds.mask(), ALL_LEDS_OFF);
}

#[test]
fn test_set_all_writes_exact_mask() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);

    for mask in [0x0000, 0x0001, 0x00FF, 0x5555, 0x8001, 0xFFFE, 0xFFFF] {
        leds.set_all(mask);
        assert_eq!(leds.mask(), mask);
    }
}

#[test]
fn test_state_follows_turn_on_and_off() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);

    for index in 1..=16 {
        leds.turn_on(index).unwrap();
        assert_eq!(leds.state(index), Ok(true));
        leds.turn_off(index).unwrap();
        assert_eq!(leds.state(index), Ok(false));
    }
}

#[test]
fn test_no_cross_talk() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);

    for a in 1..=16u8 {
        for b in 1..=16u8 {
            if a == b {
                continue;
            }
            leds.set_all(0x0000);
            leds.turn_on(a).unwrap();
            leds.turn_on(b).unwrap();

            let expected = (1u16 << (a - 1)) | (1u16 << (b - 1));
            assert_eq!(leds.mask(), expected, "LEDs {} and {}", a, b);
        }
    }
}

#[test]
fn test_turn_off_keeps_other_leds() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);

    leds.set_all(ALL_LEDS_ON);
    leds.turn_off(16).unwrap();
    assert_eq!(leds.mask(), 0x7FFF);
    assert_eq!(leds.state(15), Ok(true));
}

#[test]
fn test_turn_on_is_idempotent() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);

    for index in 1..=16 {
        leds.set_all(0x1248);
        leds.turn_on(index).unwrap();
        let once = leds.mask();
        leds.turn_on(index).unwrap();
        assert_eq!(leds.mask(), once);
    }
}

#[test]
fn test_validity_boundaries() {
    assert!(LedBank::is_valid(1));
    assert!(LedBank::is_valid(16));
    assert!(!LedBank::is_valid(0));
    assert!(!LedBank::is_valid(17));
}

#[test]
fn test_invalid_index_rejected_register_untouched() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);
    leds.set_all(0x0F0F);

    for index in [0, 17, 200] {
        assert_eq!(leds.turn_on(index), Err(LedError::InvalidArgument));
        assert_eq!(leds.turn_off(index), Err(LedError::InvalidArgument));
        assert_eq!(leds.toggle(index), Err(LedError::InvalidArgument));
        assert_eq!(leds.state(index), Err(LedError::InvalidArgument));
    }
    assert_eq!(leds.mask(), 0x0F0F);
}

#[test]
fn test_typed_index_access() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);

    leds.set(LedIndex::LAST, true);
    assert!(leds.is_on(LedIndex::LAST));
    assert!(!leds.is_on(LedIndex::FIRST));
    assert_eq!(leds.mask(), 0x8000);
}

#[test]
fn test_independent_banks() {
    let mut front: u16 = 0xFFFF;
    let mut back: u16 = 0xFFFF;
    let mut front_leds = LedBank::init(&mut front);
    let mut back_leds = LedBank::init(&mut back);

    front_leds.turn_on(1).unwrap();
    back_leds.turn_on(16).unwrap();

    drop(front_leds);
    drop(back_leds);
    assert_eq!(front, 0x0001);
    assert_eq!(back, 0x8000);
}

#[test]
fn test_reinit_discards_previous_state() {
    let mut register: u16 = 0;
    let mut leds = LedBank::init(&mut register);
    leds.set_all(0xBEEF);

    let register = leds.release();
    let leds = LedBank::init(register);
    assert_eq!(leds.mask(), 0x0000);
}

#[test]
fn test_shared_bank_scenario() {
    let register = shared_register(0xFFFF);
    let leds = SharedLedBank::init(&register);

    leds.turn_on(4).unwrap();
    leds.turn_on(6).unwrap();
    leds.turn_off(4).unwrap();
    leds.turn_off(8).unwrap();

    assert_eq!(leds.mask(), 0x0020);
    assert_eq!(leds.state(6), Ok(true));
    assert_eq!(leds.turn_on(17), Err(LedError::InvalidArgument));
    assert!(!SharedLedBank::is_valid(0));
}

#[test]
fn test_shared_bank_across_threads() {
    let register = shared_register(0);
    let leds = SharedLedBank::init(&register);

    std::thread::scope(|scope| {
        for index in 1..=16u8 {
            scope.spawn(move || {
                for _ in 0..100 {
                    leds.toggle(index).unwrap();
                }
                leds.turn_on(index).unwrap();
            });
        }
    });

    assert_eq!(leds.mask(), ALL_LEDS_ON);
}
