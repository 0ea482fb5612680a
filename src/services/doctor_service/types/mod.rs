pub mod doctors_list_response;
pub mod nested_doctors_response;
