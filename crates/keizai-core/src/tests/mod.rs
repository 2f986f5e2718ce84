mod search_box_tests;
