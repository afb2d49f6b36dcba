mod tests {
    use crate::contract::{execute, instantiate, query};
    use crate::error::ContractError;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::from_binary;
    use sourcereg::source_item::{DataResponse, ExecuteMsg, InstantiateMsg, QueryMsg};

    const PARENT: &str = "sources_registry";

    fn setup() -> cosmwasm_std::OwnedDeps<
        cosmwasm_std::MemoryStorage,
        cosmwasm_std::testing::MockApi,
        cosmwasm_std::testing::MockQuerier,
    > {
        let mut deps = mock_dependencies(&[]);
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info(PARENT, &[]),
            InstantiateMsg {},
        )
        .unwrap();
        deps
    }

    #[test]
    fn proper_initialization() {
        let deps = setup();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::GetData {}).unwrap();
        let res: DataResponse = from_binary(&res).unwrap();
        assert_eq!(res.version, 0);
        assert_eq!(res.content, None);
    }

    #[test]
    fn test_set_content_requires_parent() {
        let mut deps = setup();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("stranger", &[]),
            ExecuteMsg::SetContent {
                version: 1,
                content: String::from("http://myurl.com"),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized {});
        assert_eq!(err.code(), 401);

        // the stranger's attempt left nothing behind
        let res = query(deps.as_ref(), mock_env(), QueryMsg::GetData {}).unwrap();
        let res: DataResponse = from_binary(&res).unwrap();
        assert_eq!(res.version, 0);
        assert_eq!(res.content, None);
    }

    #[test]
    fn test_set_content_stores_data() {
        let mut deps = setup();

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(PARENT, &[]),
            ExecuteMsg::SetContent {
                version: 1,
                content: String::from("http://myurl.com"),
            },
        )
        .unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::GetData {}).unwrap();
        let res: DataResponse = from_binary(&res).unwrap();
        assert_eq!(res.version, 1);
        assert_eq!(res.content, Some(String::from("http://myurl.com")));
    }

    #[test]
    fn test_set_content_overwrites_unconditionally() {
        let mut deps = setup();

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(PARENT, &[]),
            ExecuteMsg::SetContent {
                version: 4,
                content: String::from("http://myurl.com"),
            },
        )
        .unwrap();

        // a lower version still replaces the stored record
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(PARENT, &[]),
            ExecuteMsg::SetContent {
                version: 1,
                content: String::from("http://changed.com"),
            },
        )
        .unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::GetData {}).unwrap();
        let res: DataResponse = from_binary(&res).unwrap();
        assert_eq!(res.version, 1);
        assert_eq!(res.content, Some(String::from("http://changed.com")));
    }
}
