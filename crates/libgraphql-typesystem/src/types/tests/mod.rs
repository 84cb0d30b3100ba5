mod object_type_tests;
