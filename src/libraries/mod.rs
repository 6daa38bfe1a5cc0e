pub mod zipcode_check;
