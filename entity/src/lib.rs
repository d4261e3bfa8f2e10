pub mod entrada;
