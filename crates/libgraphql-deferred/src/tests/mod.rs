mod deferred_tests;
