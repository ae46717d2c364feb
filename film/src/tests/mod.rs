mod interference;
