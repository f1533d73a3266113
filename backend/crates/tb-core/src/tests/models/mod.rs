mod issue_query;
mod issue_state;
mod label_list;
mod sync_status;
