mod scalar;

mod option;
