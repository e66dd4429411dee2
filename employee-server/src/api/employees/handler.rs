//! Employee API Handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use shared::models::{
    Employee, EmployeeCreate, EmployeeQuery, EmployeeSearchQuery, EmployeeUpdate, MessageResponse,
};

use crate::core::ServerState;
use crate::db::filter::{EmployeeFilter, FilterError};
use crate::db::models::{EmployeePatch, NewEmployee};
use crate::db::repository::{EmployeeRepository, RepoError};
use crate::utils::error::{json_rejection, query_rejection};
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult, ErrorCode};

const MSG_FETCH_FAILED: &str = "Error fetching employees";
const MSG_CREATE_FAILED: &str = "Error adding employee";
const MSG_UPDATE_FAILED: &str = "Error updating employee";
const MSG_DELETE_FAILED: &str = "Error deleting employee";
const MSG_NOT_FOUND: &str = "Employee not found";
const MSG_DELETED: &str = "Employee deleted successfully";

fn filter_error(err: FilterError) -> AppError {
    let FilterError::InvalidDate { param, .. } = &err;
    AppError::invalid_format(err.to_string()).with_detail("field", *param)
}

/// 读操作: 存储故障 500
fn read_error(context: &str, err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => AppError::with_message(ErrorCode::EmployeeNotFound, MSG_NOT_FOUND),
        RepoError::InvalidId(id) => AppError::with_message(ErrorCode::EmployeeInvalidId, format!("Invalid ID: {}", id)),
        RepoError::Validation(msg) => AppError::validation(msg),
        RepoError::Duplicate { message, .. } => AppError::invalid_request(message),
        RepoError::Database(msg) => {
            tracing::error!(target: "database", error = %msg, "{}", context);
            AppError::with_message(ErrorCode::DatabaseError, context).with_detail("error", msg)
        }
    }
}

/// 写操作: 存储故障 400，唯一冲突 400，不存在 404
fn write_error(context: &str, err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => AppError::with_message(ErrorCode::EmployeeNotFound, MSG_NOT_FOUND),
        RepoError::InvalidId(id) => AppError::with_message(ErrorCode::EmployeeInvalidId, format!("Invalid ID: {}", id)),
        RepoError::Validation(msg) => {
            AppError::with_message(ErrorCode::ValidationFailed, format!("{}: {}", context, msg))
        }
        RepoError::Duplicate { field, message } => {
            let code = if field == "email" {
                ErrorCode::EmployeeEmailExists
            } else {
                ErrorCode::EmployeeIdExists
            };
            AppError::with_message(code, message).with_detail("field", field)
        }
        RepoError::Database(msg) => {
            tracing::error!(target: "database", error = %msg, "{}", context);
            AppError::with_message(ErrorCode::EmployeeWriteFailed, context).with_detail("error", msg)
        }
    }
}

async fn find(state: &ServerState, filter: &EmployeeFilter) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo
        .find(filter)
        .await
        .map_err(|e| read_error(MSG_FETCH_FAILED, e))?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// List employees
///
/// 支持 employeeId / name / department 过滤；dateFrom 和 dateTo 同时提供时按入职日期过滤
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<EmployeeQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Employee>>> {
    let Query(query) = query.map_err(query_rejection)?;
    let filter = EmployeeFilter::from_query(&query).map_err(filter_error)?;
    find(&state, &filter).await
}

/// Search employees
///
/// startDate / endDate 会被接受但不参与过滤
pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<EmployeeSearchQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Employee>>> {
    let Query(query) = query.map_err(query_rejection)?;
    if query.start_date.is_some() || query.end_date.is_some() {
        tracing::debug!("search: startDate/endDate ignored");
    }
    let filter = EmployeeFilter::from_search(&query);
    find(&state, &filter).await
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(&id)
        .await
        .map_err(|e| read_error(MSG_FETCH_FAILED, e))?
        .ok_or_else(|| AppError::with_message(ErrorCode::EmployeeNotFound, MSG_NOT_FOUND))?;
    Ok(Json(employee.into()))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let Json(payload) = payload.map_err(json_rejection)?;
    validate_payload(&payload, MSG_CREATE_FAILED)?;

    let data = NewEmployee::try_from(payload).map_err(|e| write_error(MSG_CREATE_FAILED, e))?;

    let repo = EmployeeRepository::new(state.db.clone());
    let employee: Employee = repo
        .create(data)
        .await
        .map_err(|e| write_error(MSG_CREATE_FAILED, e))?
        .into();

    tracing::info!(id = %employee.id, employee_id = %employee.employee_id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee
///
/// 只修改请求体中出现的字段
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> AppResult<Json<Employee>> {
    let Json(payload) = payload.map_err(json_rejection)?;
    validate_payload(&payload, MSG_UPDATE_FAILED)?;

    let repo = EmployeeRepository::new(state.db.clone());
    let employee: Employee = repo
        .update(&id, EmployeePatch::from(payload))
        .await
        .map_err(|e| write_error(MSG_UPDATE_FAILED, e))?
        .into();

    tracing::info!(id = %employee.id, "Employee updated");
    Ok(Json(employee))
}

/// Delete an employee
///
/// 记录不存在时同样返回 200
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let existed = repo
        .delete(&id)
        .await
        .map_err(|e| write_error(MSG_DELETE_FAILED, e))?;

    if existed {
        tracing::info!(id = %id, "Employee deleted");
    } else {
        tracing::debug!(id = %id, "Delete target not found");
    }

    Ok(Json(MessageResponse::new(MSG_DELETED)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duplicate(field: &'static str) -> RepoError {
        RepoError::Duplicate {
            field,
            message: format!("{field} already exists"),
        }
    }

    #[test]
    fn test_storage_fault_on_read_is_500() {
        let err = read_error(MSG_FETCH_FAILED, RepoError::Database("connection reset".into()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, MSG_FETCH_FAILED);
        assert_eq!(err.details.unwrap()["error"], "connection reset");
    }

    #[test]
    fn test_storage_fault_on_write_is_400() {
        for context in [MSG_CREATE_FAILED, MSG_UPDATE_FAILED, MSG_DELETE_FAILED] {
            let err = write_error(context, RepoError::Database("disk full".into()));
            assert_eq!(err.code, ErrorCode::EmployeeWriteFailed);
            assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.message, context);
        }
    }

    #[test]
    fn test_duplicate_maps_to_field_code() {
        let err = write_error(MSG_CREATE_FAILED, duplicate("employeeId"));
        assert_eq!(err.code.code(), 8002);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.details.unwrap()["field"], "employeeId");

        let err = write_error(MSG_UPDATE_FAILED, duplicate("email"));
        assert_eq!(err.code.code(), 8003);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.details.unwrap()["field"], "email");
    }

    #[test]
    fn test_not_found_is_404_on_both_paths() {
        let err = write_error(MSG_UPDATE_FAILED, RepoError::NotFound("employee:x".into()));
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, MSG_NOT_FOUND);

        let err = read_error(MSG_FETCH_FAILED, RepoError::NotFound("employee:x".into()));
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_id_is_400() {
        for err in [
            read_error(MSG_FETCH_FAILED, RepoError::InvalidId("user:1".into())),
            write_error(MSG_DELETE_FAILED, RepoError::InvalidId("user:1".into())),
        ] {
            assert_eq!(err.code, ErrorCode::EmployeeInvalidId);
            assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.message, "Invalid ID: user:1");
        }
    }

    #[test]
    fn test_invalid_date_names_parameter() {
        let err = filter_error(FilterError::InvalidDate {
            param: "dateFrom",
            value: "soon".into(),
        });
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.details.unwrap()["field"], "dateFrom");
    }
}
