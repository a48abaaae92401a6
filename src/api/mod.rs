pub mod cep;
