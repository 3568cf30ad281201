mod presenter_tests;
