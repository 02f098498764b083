mod address_test;
