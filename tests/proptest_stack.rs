//! Property-based tests for stack discipline.

use cpu6502::{StatusFlags, CPU};
use proptest::prelude::*;

fn setup_cpu(program: &[u8]) -> CPU {
    let mut cpu = CPU::new();
    cpu.load(program).unwrap();
    cpu.reset();
    cpu
}

proptest! {
    /// Property: a push followed by a pop restores the value and SP, from any SP
    #[test]
    fn prop_push_pop_round_trip(sp in any::<u8>(), value in any::<u8>()) {
        let mut cpu = CPU::new();
        cpu.set_sp(sp);

        cpu.stack_push(value);
        prop_assert_eq!(cpu.mem_read(0x0100 | u16::from(sp)), value);
        prop_assert_eq!(cpu.sp(), sp.wrapping_sub(1));

        prop_assert_eq!(cpu.stack_pop(), value);
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: stack traffic never touches memory outside page one
    #[test]
    fn prop_stack_stays_in_page_one(sp in any::<u8>(), values in prop::collection::vec(any::<u8>(), 1..600)) {
        let mut cpu = CPU::new();
        cpu.set_sp(sp);

        for &value in &values {
            cpu.stack_push(value);
        }
        for _ in &values {
            cpu.stack_pop();
        }

        let memory = cpu.memory().as_slice();
        prop_assert!(memory[..0x0100].iter().all(|&b| b == 0));
        prop_assert!(memory[0x0200..].iter().all(|&b| b == 0));
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: PHA; PLA restores A and sets Z/N from it
    #[test]
    fn prop_pha_pla(a in any::<u8>(), sp in any::<u8>()) {
        // PHA; LDA #$00; PLA
        let mut cpu = setup_cpu(&[0x48, 0xA9, 0x00, 0x68]);
        cpu.set_a(a);
        cpu.set_sp(sp);

        for _ in 0..3 {
            cpu.step().unwrap();
        }

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.sp(), sp);
        prop_assert_eq!(cpu.flag_z(), a == 0);
        prop_assert_eq!(cpu.flag_n(), a & 0x80 != 0);
    }

    /// Property: PHP; PLP restores every flag except B (cleared) and B2 (set)
    #[test]
    fn prop_php_plp(status in any::<u8>()) {
        let mut cpu = setup_cpu(&[0x08, 0x28]);
        cpu.set_status(status);

        cpu.step().unwrap();
        let pushed = cpu.mem_read(0x01FD);
        prop_assert_eq!(pushed, status | StatusFlags::BREAK.bits() | StatusFlags::BREAK2.bits());

        cpu.step().unwrap();
        let expected = (status & !StatusFlags::BREAK.bits()) | StatusFlags::BREAK2.bits();
        prop_assert_eq!(cpu.status(), expected);
    }

    /// Property: JSR then RTS lands on the byte after the JSR with SP restored
    #[test]
    fn prop_jsr_rts(target in 0x0200u16..0x8000, sp in any::<u8>()) {
        let [lo, hi] = target.to_le_bytes();
        let mut cpu = setup_cpu(&[0x20, lo, hi]);
        cpu.mem_write(target, 0x60); // RTS
        cpu.set_sp(sp);

        cpu.step().unwrap();
        prop_assert_eq!(cpu.pc(), target);
        prop_assert_eq!(cpu.sp(), sp.wrapping_sub(2));

        cpu.step().unwrap();
        prop_assert_eq!(cpu.pc(), 0x8003);
        prop_assert_eq!(cpu.sp(), sp);
    }
}
