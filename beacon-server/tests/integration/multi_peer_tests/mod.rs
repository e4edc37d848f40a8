mod test_third_peer_rejected;
