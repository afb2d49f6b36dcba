use crate::error::ContractError;
use crate::state::{CONFIG, CONTRACT_CODE, SOURCE_ITEM_CODE};
use cosmwasm_std::{
    to_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    Uint128, WasmMsg,
};
use sourcereg::constants::{CONTENT_HASH_BYTES, FEE_DENOM, FEE_FLOOR, VERIFIER_ID_BYTES};
use sourcereg::source_item::ExecuteMsg as SourceItemExecuteMsg;
use sourcereg::sources_registry::{
    AdminAddressResponse, ContractCodeResponse, DeploymentCostsResponse,
    SourceItemAddressResponse, VerifierRegistryAddressResponse,
};
use sourcereg::utils::{derive_source_item_address, sha256};

fn only_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

fn attached_amount(info: &MessageInfo) -> Uint128 {
    info.funds
        .iter()
        .find(|coin| coin.denom == FEE_DENOM)
        .map(|coin| coin.amount)
        .unwrap_or_else(Uint128::zero)
}

fn validate_key(key: &[u8], expected: usize, field: &str) -> Result<(), ContractError> {
    if key.len() != expected {
        return Err(ContractError::Std(StdError::generic_err(format!(
            "{} must be {} bytes",
            field, expected
        ))));
    }
    Ok(())
}

pub fn deploy_source(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    query_id: u64,
    verifier_id: Vec<u8>,
    content_hash: Vec<u8>,
    version: u8,
    json_url: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.verifier_registry {
        return Err(ContractError::Unauthorized {});
    }

    let value = attached_amount(&info);
    if value < config.min_fee {
        return Err(ContractError::BelowMinFee {
            value,
            min: config.min_fee,
        });
    }
    if value > config.max_fee {
        return Err(ContractError::AboveMaxFee {
            value,
            max: config.max_fee,
        });
    }

    validate_key(&verifier_id, VERIFIER_ID_BYTES, "verifier_id")?;
    validate_key(&content_hash, CONTENT_HASH_BYTES, "content_hash")?;

    let code = SOURCE_ITEM_CODE.load(deps.storage)?;
    let child = derive_source_item_address(
        code.as_slice(),
        &env.contract.address,
        &verifier_id,
        &content_hash,
    );

    // Create-if-absent is the host's concern; the registry always sends the
    // same set-content message to the derived address.
    let set_content = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: child.to_string(),
        msg: to_binary(&SourceItemExecuteMsg::SetContent {
            version,
            content: json_url.clone(),
        })?,
        funds: info.funds,
    });

    Ok(Response::new()
        .add_message(set_content)
        .add_attribute("method", "deploy_source")
        .add_attribute("query_id", query_id.to_string())
        .add_attribute("source_item", child.to_string())
        .add_attribute("version", version.to_string()))
}

pub fn change_verifier_registry(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.verifier_registry = deps.api.addr_canonicalize(address.as_str())?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "change_verifier_registry")
        .add_attribute("verifier_registry", address))
}

pub fn change_admin(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.admin = deps.api.addr_canonicalize(address.as_str())?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "change_admin")
        .add_attribute("admin", address))
}

pub fn change_code(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    code: Binary,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    if code.as_slice().is_empty() {
        return Err(ContractError::EmptyCode {});
    }
    let code_hash = hex::encode(sha256(code.as_slice()));
    CONTRACT_CODE.save(deps.storage, &code)?;
    Ok(Response::new()
        .add_attribute("method", "change_code")
        .add_attribute("code_hash", code_hash))
}

pub fn set_source_item_code(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    code: Binary,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    if code.as_slice().is_empty() {
        return Err(ContractError::EmptyCode {});
    }
    let code_hash = hex::encode(sha256(code.as_slice()));
    SOURCE_ITEM_CODE.save(deps.storage, &code)?;
    Ok(Response::new()
        .add_attribute("method", "set_source_item_code")
        .add_attribute("code_hash", code_hash))
}

pub fn set_deployment_costs(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    min: Uint128,
    max: Uint128,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    let floor = Uint128::from(FEE_FLOOR);
    if min < floor {
        return Err(ContractError::FeeFloorViolation { min, floor });
    }
    // min > max is accepted, matching the reference behavior.
    let mut config = CONFIG.load(deps.storage)?;
    config.min_fee = min;
    config.max_fee = max;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_deployment_costs")
        .add_attribute("min", min.to_string())
        .add_attribute("max", max.to_string()))
}

pub fn query_verifier_registry_address(deps: Deps) -> StdResult<VerifierRegistryAddressResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(VerifierRegistryAddressResponse {
        address: deps.api.addr_humanize(&config.verifier_registry)?,
    })
}

pub fn query_admin_address(deps: Deps) -> StdResult<AdminAddressResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(AdminAddressResponse {
        address: deps.api.addr_humanize(&config.admin)?,
    })
}

pub fn query_deployment_costs(deps: Deps) -> StdResult<DeploymentCostsResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(DeploymentCostsResponse {
        min: config.min_fee,
        max: config.max_fee,
    })
}

pub fn query_contract_code(deps: Deps) -> StdResult<ContractCodeResponse> {
    let code = CONTRACT_CODE.load(deps.storage)?;
    let code = if code.as_slice().is_empty() {
        None
    } else {
        Some(code)
    };
    Ok(ContractCodeResponse { code })
}

pub fn query_source_item_address(
    deps: Deps,
    env: Env,
    verifier_id: Vec<u8>,
    content_hash: Vec<u8>,
) -> StdResult<SourceItemAddressResponse> {
    let code = SOURCE_ITEM_CODE.load(deps.storage)?;
    Ok(SourceItemAddressResponse {
        address: derive_source_item_address(
            code.as_slice(),
            &env.contract.address,
            &verifier_id,
            &content_hash,
        ),
    })
}
