use authbits::*;

#[test] fn test_user_role_label() {
    assert_eq!(role_name(Role::User.mask()), "일반 사용자");
    assert_eq!(role_name(Role::ClientManager.mask()), "클라이언트 관리자");
    assert_eq!(role_name(0), "사용자 정의");
}

#[test] fn test_grant_and_revoke_bits() {
    let m = add_permissions(default_permissions(), &[WRITE_USER, UPLOAD_FILE]);
    assert!(has_all_permissions(m, &[READ_USER, WRITE_USER, UPLOAD_FILE]));
    let m = remove_permissions(m, &[UPLOAD_FILE]);
    assert!(!has_permission(m, UPLOAD_FILE));
    assert_eq!(m, default_permissions() | WRITE_USER);
}

#[test] fn test_admin_marker() {
    assert!(!is_admin(all_permissions_mask()));
    assert!(is_admin(admin_permission()));
    assert_eq!(all_permissions().len(), 15);
}

#[test] fn test_hex() {
    assert_eq!(permissions_to_hex(Role::User.mask()), "0x959");
    assert_eq!(hex_to_permissions("0x959").unwrap(), Role::User.mask());
    assert!(matches!(hex_to_permissions("0xZZ"), Err(AuthbitsError::InvalidFormat { .. })));
}

#[test] fn test_storage_keys() {
    assert_eq!(token_key("login".parse().unwrap()), storage::local::LOGIN_TOKEN);
    assert_eq!(refresh_token_key(TokenType::Oauth2), "refresh_token_oauth2");
    assert_eq!(all_auth_keys().len(), 6);
    assert_eq!(StorageArea::Cookie.keys(), &["token", "csrf_token", "session_id"]);
}
