//! # Status Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, CLV: set or clear one flag, leaving the rest
//! untouched. SED only records the flag; arithmetic stays binary.

use super::Flow;
use crate::{MemoryBus, StatusFlags, CPU};

pub(crate) fn assign<M: MemoryBus>(cpu: &mut CPU<M>, flag: StatusFlags, value: bool) -> Flow {
    cpu.status.assign(flag, value);
    Flow::Next
}
