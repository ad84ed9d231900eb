mod valuation_service_tests;
