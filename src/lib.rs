//! # brics - A Brainfuck interpreter, disassembler and C transpiler
//!
//! Programs may be written in standard Brainfuck, or in a "relex" of it: a
//! bijective substitution of the eight instruction characters with other
//! tokens (Ook! being the classic example).
//!
//! Pipeline: source text is tokenized with a [`RelexTable`], optionally
//! optimised, and built into a [`Program`] with matched loops. A program can
//! then be [executed](execute), [disassembled](disassemble) or
//! [translated to C](generate_c).

// Re-export some symbols.
pub use codegen::generate_c;
pub use disasm::disassemble;
pub use disasm::Disassembly;
pub use instruction::Instruction;
pub use interpreter::execute;
pub use interpreter::ExecuteCallbackData;
pub use interpreter::ExecuteCallbackResult;
pub use interpreter::ExecutionError;
pub use optimizers::optimize;
pub use parser::build_program;
pub use parser::parse_source;
pub use parser::tokenize;
pub use parser::ParseError;
pub use program::Program;
pub use program::ProgramInfo;
pub use relex::parse_relex;
pub use relex::RelexError;
pub use relex::RelexTable;
pub use types::BfNum;
pub use types::TapeAddr;

mod codegen;
pub mod disasm;
pub mod instruction;
mod interpreter;
mod optimizers;
mod parser;
pub mod program;
pub mod relex;
pub mod settings;
pub mod tape;
#[doc(hidden)]
pub mod test_utils;
pub mod types;
