mod portfolio_service_tests;
