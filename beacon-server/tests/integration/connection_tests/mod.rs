mod test_disconnect_removes_destination;
