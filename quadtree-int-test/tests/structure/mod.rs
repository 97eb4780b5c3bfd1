//! Tree shape integration test module.

mod tree_shape_test;
