mod manifest_locator_tests;
