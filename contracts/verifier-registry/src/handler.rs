use crate::error::ContractError;
use crate::quorum::verify_quorum;
use crate::state::{Verifier, CONFIG, VERIFIERS, VERIFIERS_NUM};
use cosmwasm_std::{
    coins, BankMsg, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
    Uint128, WasmMsg,
};
use sourcereg::constants::{
    ENDPOINT_ENTRY_BYTES, FEE_DENOM, FORWARD_FEE, FORWARD_VALIDITY_WINDOW, MAX_ADDRESS_BYTES,
    MAX_ENDPOINTS_BYTES, PUBLIC_KEY_BYTES, UPDATE_VERIFIER_FEE, VERIFIER_ID_BYTES, VERIFIER_STAKE,
};
use sourcereg::utils::{message_description_digest, verifier_id_from_name};
use sourcereg::verifier_registry::{
    Endpoint, MessageDescription, SignatureEntry, VerifierResponse, VerifiersNumResponse,
    VerifiersResponse,
};

fn attached_amount(info: &MessageInfo) -> Uint128 {
    info.funds
        .iter()
        .find(|coin| coin.denom == FEE_DENOM)
        .map(|coin| coin.amount)
        .unwrap_or_else(Uint128::zero)
}

fn refund_msg(to: &str, amount: Uint128) -> Option<CosmosMsg> {
    if amount.is_zero() {
        return None;
    }
    Some(CosmosMsg::Bank(BankMsg::Send {
        to_address: to.to_string(),
        amount: coins(amount.u128(), FEE_DENOM),
    }))
}

fn leftover(attached: Uint128, fee: u128) -> Uint128 {
    let fee = Uint128::from(fee);
    if attached > fee {
        attached - fee
    } else {
        Uint128::zero()
    }
}

pub fn update_verifier(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    query_id: u64,
    id: Vec<u8>,
    quorum: u8,
    mut endpoints: Vec<Endpoint>,
    name: String,
    marketing_url: String,
) -> Result<Response, ContractError> {
    if quorum == 0 {
        return Err(ContractError::RegistrationDenied {
            reason: String::from("quorum must be at least 1"),
        });
    }
    if endpoints.is_empty() {
        return Err(ContractError::RegistrationDenied {
            reason: String::from("endpoint set must not be empty"),
        });
    }
    if id != verifier_id_from_name(&name) {
        return Err(ContractError::RegistrationDenied {
            reason: String::from("id is not the digest of the verifier name"),
        });
    }

    // Stored key-sorted and deduplicated so lookups and iteration are
    // deterministic.
    endpoints.sort_by(|a, b| a.public_key.cmp(&b.public_key));
    endpoints.dedup_by(|a, b| a.public_key == b.public_key);

    let size = endpoints.len() * ENDPOINT_ENTRY_BYTES;
    if size > MAX_ENDPOINTS_BYTES {
        return Err(ContractError::PayloadTooLarge {
            size,
            limit: MAX_ENDPOINTS_BYTES,
        });
    }
    for entry in &endpoints {
        let decoded =
            hex::decode(&entry.public_key).map_err(|_| ContractError::RegistrationDenied {
                reason: format!("endpoint key {} is not valid hex", entry.public_key),
            })?;
        if decoded.len() != PUBLIC_KEY_BYTES {
            return Err(ContractError::RegistrationDenied {
                reason: format!("endpoint key {} is not a 32-byte public key", entry.public_key),
            });
        }
    }

    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    match VERIFIERS.may_load(deps.storage, id.clone())? {
        Some(verifier) => {
            if verifier.admin != sender {
                return Err(ContractError::Unauthorized {});
            }
        }
        None => {
            let config = CONFIG.load(deps.storage)?;
            let num = VERIFIERS_NUM.load(deps.storage)?;
            if num >= config.capacity {
                return Err(ContractError::CapacityExceeded {
                    num,
                    capacity: config.capacity,
                });
            }
            VERIFIERS_NUM.save(deps.storage, &(num + 1))?;
        }
    }

    VERIFIERS.save(
        deps.storage,
        id.clone(),
        &Verifier {
            admin: sender,
            quorum,
            pub_key_endpoints: endpoints,
            name,
            marketing_url,
        },
    )?;

    let refund = leftover(attached_amount(&info), UPDATE_VERIFIER_FEE);
    let mut response = Response::new()
        .add_attribute("method", "update_verifier")
        .add_attribute("query_id", query_id.to_string())
        .add_attribute("id", hex::encode(&id))
        .add_attribute("comment", "You successfully updated verifier data");
    if let Some(msg) = refund_msg(info.sender.as_str(), refund) {
        response = response.add_message(msg);
    }
    Ok(response)
}

pub fn remove_verifier(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    query_id: u64,
    id: Vec<u8>,
) -> Result<Response, ContractError> {
    let verifier = VERIFIERS
        .may_load(deps.storage, id.clone())?
        .ok_or(ContractError::NotFound {
            id: hex::encode(&id),
        })?;

    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if verifier.admin != sender {
        return Err(ContractError::Unauthorized {});
    }

    VERIFIERS.remove(deps.storage, id.clone());
    let num = VERIFIERS_NUM.load(deps.storage)?;
    VERIFIERS_NUM.save(deps.storage, &num.saturating_sub(1))?;

    // The entry's reserved stake goes back to the admin along with the
    // attached value.
    let refund = attached_amount(&info) + Uint128::from(VERIFIER_STAKE);
    let mut response = Response::new()
        .add_attribute("method", "remove_verifier")
        .add_attribute("query_id", query_id.to_string())
        .add_attribute("id", hex::encode(&id))
        .add_attribute("comment", "You successfully removed verifier data");
    if let Some(msg) = refund_msg(info.sender.as_str(), refund) {
        response = response.add_message(msg);
    }
    Ok(response)
}

pub fn forward_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    query_id: u64,
    description: MessageDescription,
    signatures: Vec<SignatureEntry>,
) -> Result<Response, ContractError> {
    if description.verifier_id.len() != VERIFIER_ID_BYTES {
        return Err(ContractError::NotFound {
            id: hex::encode(&description.verifier_id),
        });
    }
    let verifier = VERIFIERS
        .may_load(deps.storage, description.verifier_id.clone())?
        .ok_or(ContractError::NotFound {
            id: hex::encode(&description.verifier_id),
        })?;

    let current = env.block.time.seconds();
    let valid_till = description.valid_till as u64;
    if current > valid_till {
        return Err(ContractError::Expired {
            valid_till,
            current,
        });
    }
    let window_end = current + FORWARD_VALIDITY_WINDOW;
    if valid_till > window_end {
        return Err(ContractError::StaleTimestamp {
            valid_till,
            window_end,
        });
    }

    // The canonical encoding carries one-byte length prefixes for source and
    // target; longer values would make distinct descriptions share a digest.
    let longest = description.source.len().max(description.target.len());
    if longest > MAX_ADDRESS_BYTES {
        return Err(ContractError::PayloadTooLarge {
            size: longest,
            limit: MAX_ADDRESS_BYTES,
        });
    }

    if info.sender.as_str() != description.source {
        return Err(ContractError::WrongSender {
            sender: info.sender.to_string(),
            expected_source: description.source.clone(),
        });
    }
    if description.payload.as_slice().is_empty() {
        return Err(ContractError::EmptyMessage {});
    }

    let digest = message_description_digest(&description);
    let count = verify_quorum(
        deps.api,
        &digest,
        verifier.quorum,
        &signatures,
        &verifier.pub_key_endpoints,
    )?;

    let forward_amount = leftover(attached_amount(&info), FORWARD_FEE);
    let funds = if forward_amount.is_zero() {
        vec![]
    } else {
        coins(forward_amount.u128(), FEE_DENOM)
    };

    // The payload is relayed byte-identical; the registry never inspects it.
    let relay = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: description.target.clone(),
        msg: description.payload,
        funds,
    });

    Ok(Response::new()
        .add_message(relay)
        .add_attribute("method", "forward_message")
        .add_attribute("query_id", query_id.to_string())
        .add_attribute("target", description.target)
        .add_attribute("signatures", count.to_string()))
}

pub fn query_verifier(deps: Deps, id: Vec<u8>) -> StdResult<Option<VerifierResponse>> {
    let verifier = VERIFIERS.may_load(deps.storage, id.clone())?;
    verifier
        .map(|v| {
            Ok(VerifierResponse {
                id,
                admin: deps.api.addr_humanize(&v.admin)?,
                quorum: v.quorum,
                pub_key_endpoints: v.pub_key_endpoints,
                name: v.name,
                marketing_url: v.marketing_url,
            })
        })
        .transpose()
}

pub fn query_verifiers_num(deps: Deps) -> StdResult<VerifiersNumResponse> {
    let num = VERIFIERS_NUM.load(deps.storage)?;
    Ok(VerifiersNumResponse { num })
}

pub fn query_verifiers(deps: Deps) -> StdResult<VerifiersResponse> {
    let verifiers = VERIFIERS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| {
            let (id, v) = item?;
            Ok(VerifierResponse {
                id,
                admin: deps.api.addr_humanize(&v.admin)?,
                quorum: v.quorum,
                pub_key_endpoints: v.pub_key_endpoints,
                name: v.name,
                marketing_url: v.marketing_url,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(VerifiersResponse { verifiers })
}
