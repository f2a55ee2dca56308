mod builtin;
mod value;
