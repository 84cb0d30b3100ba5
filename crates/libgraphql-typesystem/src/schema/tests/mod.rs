mod resolver_tests;
