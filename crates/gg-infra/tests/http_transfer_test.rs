//! Streaming downloads against a local mock server.

use gg_core::ports::{TransferError, TransferPort};
use gg_core::TaskId;
use gg_infra::HttpTransfer;
use mockito::Server;

#[tokio::test]
async fn ok_response_is_written_to_target() {
    let mut server = Server::new_async().await;
    let body = vec![0x47u8; 64 * 1024];
    server
        .mock("GET", "/media/abc.gif")
        .with_status(200)
        .with_header("content-type", "image/gif")
        .with_body(body.clone())
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("abc.gif");
    let transfer = HttpTransfer::new().unwrap();

    let receipt = transfer
        .transfer(
            &format!("{}/media/abc.gif", server.url()),
            &target,
            &TaskId::new(),
        )
        .await
        .unwrap();

    assert_eq!(receipt.status, 200);
    assert_eq!(receipt.bytes_written, body.len() as u64);
    assert_eq!(std::fs::read(&target).unwrap(), body);
    assert_eq!(
        std::fs::read_dir(target.parent().unwrap()).unwrap().count(),
        1,
        "no partial files left behind"
    );
}

#[tokio::test]
async fn repeated_transfer_overwrites_target() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1.gif")
        .with_status(200)
        .with_body("first")
        .create_async()
        .await;
    server
        .mock("GET", "/v2.gif")
        .with_status(200)
        .with_body("second")
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("abc.gif");
    let transfer = HttpTransfer::new().unwrap();

    for path in ["/v1.gif", "/v2.gif"] {
        transfer
            .transfer(&format!("{}{path}", server.url()), &target, &TaskId::new())
            .await
            .unwrap();
    }

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
}

#[tokio::test]
async fn non_200_leaves_existing_file_untouched() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/missing.gif")
        .with_status(404)
        .with_body("not found")
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("abc.gif");
    std::fs::write(&target, "previous").unwrap();
    let transfer = HttpTransfer::new().unwrap();

    let receipt = transfer
        .transfer(
            &format!("{}/missing.gif", server.url()),
            &target,
            &TaskId::new(),
        )
        .await
        .unwrap();

    assert_eq!(receipt.status, 404);
    assert_eq!(receipt.bytes_written, 0);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "previous");
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let dir = tempfile::tempdir().unwrap();
    let transfer = HttpTransfer::new().unwrap();

    let result = transfer
        .transfer(
            "http://127.0.0.1:9/abc.gif",
            &dir.path().join("abc.gif"),
            &TaskId::new(),
        )
        .await;

    assert!(matches!(result, Err(TransferError::Transport(_))));
}

#[tokio::test]
async fn failed_rename_removes_part_file() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/abc.gif")
        .with_status(200)
        .with_body("gif bytes")
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();
    // A non-empty directory where the file should go makes the rename fail.
    let target = dir.path().join("abc.gif");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("keep"), "x").unwrap();
    let transfer = HttpTransfer::new().unwrap();

    let result = transfer
        .transfer(&format!("{}/abc.gif", server.url()), &target, &TaskId::new())
        .await;

    assert!(matches!(result, Err(TransferError::Storage(_))));
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name.to_string_lossy().ends_with(".part"))
        .collect();
    assert!(leftovers.is_empty(), "partial files left: {leftovers:?}");
}
