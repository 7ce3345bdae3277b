// Pipeline stages, leaf-first. Every public operation bounds length first,
// then reduces the character set, then runs its specific check or parse,
// routing any failure through the context's fault sink exactly once.

pub mod bounder;
pub mod compare;
pub mod dates;
pub mod faults;
pub mod filename;
pub mod normalizer;
pub mod numbers;
pub mod range;
