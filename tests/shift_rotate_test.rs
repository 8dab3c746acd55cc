//! Tests for ASL, LSR, ROL and ROR in accumulator and memory forms.

use cpu6502::CPU;

fn setup_cpu(program: &[u8]) -> CPU {
    let mut cpu = CPU::new();
    cpu.load(program).unwrap();
    cpu.reset();
    cpu
}

// ========== ASL ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu(&[0x0A]); // ASL A
    cpu.set_a(0b1100_0001);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0b1000_0010);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_asl_to_zero() {
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.set_a(0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_asl_zero_page_leaves_accumulator() {
    let mut cpu = setup_cpu(&[0x06, 0x10]); // ASL $10
    cpu.set_a(0x99);
    cpu.mem_write(0x0010, 0x21);

    cpu.step().unwrap();

    assert_eq!(cpu.mem_read(0x0010), 0x42);
    assert_eq!(cpu.a(), 0x99);
    assert!(!cpu.flag_c());
    assert_eq!(cpu.cycles(), 5);
}

// ========== LSR ==========

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup_cpu(&[0x4A]); // LSR A
    cpu.set_a(0x03);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_never_sets_negative() {
    let mut cpu = setup_cpu(&[0x4A]);
    cpu.set_a(0xFF);
    cpu.set_flag_n(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_absolute_x() {
    let mut cpu = setup_cpu(&[0x5E, 0x00, 0x20]); // LSR $2000,X
    cpu.set_x(0x03);
    cpu.mem_write(0x2003, 0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.mem_read(0x2003), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.cycles(), 7);
}

// ========== ROL ==========

#[test]
fn test_rol_shifts_carry_in() {
    let mut cpu = setup_cpu(&[0x2A]); // ROL A
    cpu.set_a(0b0100_0000);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0b1000_0001);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_rol_carry_out() {
    let mut cpu = setup_cpu(&[0x2A]);
    cpu.set_a(0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_rol_memory() {
    let mut cpu = setup_cpu(&[0x2E, 0x00, 0x30]); // ROL $3000
    cpu.mem_write(0x3000, 0x81);

    cpu.step().unwrap();

    assert_eq!(cpu.mem_read(0x3000), 0x02);
    assert!(cpu.flag_c());
}

// ========== ROR ==========

#[test]
fn test_ror_shifts_carry_into_bit_seven() {
    let mut cpu = setup_cpu(&[0x6A]); // ROR A
    cpu.set_a(0x02);
    cpu.set_flag_c(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_carry_out() {
    let mut cpu = setup_cpu(&[0x6A]);
    cpu.set_a(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_ror_zero_page_x_wraps() {
    let mut cpu = setup_cpu(&[0x76, 0xFF]); // ROR $FF,X
    cpu.set_x(0x02);
    cpu.mem_write(0x0001, 0x04);

    cpu.step().unwrap();

    assert_eq!(cpu.mem_read(0x0001), 0x02);
    assert_eq!(cpu.mem_read(0x0101), 0x00);
}

#[test]
fn test_rol_ror_restore_value() {
    // ROL A; ROR A
    let mut cpu = setup_cpu(&[0x2A, 0x6A]);
    cpu.set_a(0xB5);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xB5);
    assert!(!cpu.flag_c());
}
