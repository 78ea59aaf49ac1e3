// Public library interface for treecut
// The CLI and the diagnostic binaries use these core modules

pub mod cut;
pub mod model;
pub mod scanner;
pub mod tree;
