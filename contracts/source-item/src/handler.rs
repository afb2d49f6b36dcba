use crate::error::ContractError;
use crate::state::{Data, DATA, PARENT};
use cosmwasm_std::{Deps, DepsMut, MessageInfo, Response, StdResult};
use sourcereg::source_item::DataResponse;

pub fn set_content(
    deps: DepsMut,
    info: MessageInfo,
    version: u8,
    content: String,
) -> Result<Response, ContractError> {
    let parent = PARENT.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != parent {
        return Err(ContractError::Unauthorized {});
    }

    // Unconditional overwrite, including version downgrades.
    DATA.save(
        deps.storage,
        &Data {
            version,
            content: Some(content),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "set_content")
        .add_attribute("version", version.to_string()))
}

pub fn query_data(deps: Deps) -> StdResult<DataResponse> {
    let data = DATA.load(deps.storage)?;
    Ok(DataResponse {
        version: data.version,
        content: data.content,
    })
}
