pub mod tweet_generator_service;
