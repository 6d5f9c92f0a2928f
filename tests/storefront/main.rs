mod cart;
mod checkout;
mod health_check;
mod test_utils;
