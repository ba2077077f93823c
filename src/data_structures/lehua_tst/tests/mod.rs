//! Unit and property-based tests for the Lehua Ternary Search Tree.
