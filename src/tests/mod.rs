mod pg_store;
