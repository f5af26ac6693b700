pub mod global_variables;
pub mod probe;
pub mod url_list;
