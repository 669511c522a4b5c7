pub mod tree_select;
