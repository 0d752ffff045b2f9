mod viewport_tests;
