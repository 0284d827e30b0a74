// Test modules for multi-chat
//
// Each source file has a corresponding test file focused on behavior.

// Test helper utilities
pub mod helpers;
