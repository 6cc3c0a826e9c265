//! CLI command implementations.

pub(crate) mod compile;

pub(crate) use compile::CompileArgs;
