use std::time::Duration;
use tokio::time::sleep;

use foreman_core::app::WorkOrderService;
use foreman_core::domain::{WorkOrderDraft, WorkOrderPatch};
use foreman_core::impls::{InMemoryStore, JsonFileStore};
use foreman_core::ports::RecordStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // backing store を選ぶ:
    // - `--ephemeral` ならメモリ実装（ディスクに何も残らない）
    // - それ以外は引数のパス、無指定ならカレントの work_orders.json
    match std::env::args().nth(1).as_deref() {
        Some("--ephemeral") => run(WorkOrderService::new(InMemoryStore::new())).await,
        arg => {
            let path = arg.unwrap_or("work_orders.json").to_string();
            run(WorkOrderService::new(JsonFileStore::new(&path))).await;
        }
    }
}

/// create → list → update → get → remove を一巡するデモ
async fn run<S: RecordStore>(service: WorkOrderService<S>) {
    // (A) 作成（id と updatedAt はストアが採番・スタンプする）
    let created = service
        .create(WorkOrderDraft::new(
            "Fix HVAC",
            "Repair the air conditioning unit thoroughly",
            "High",
            "Open",
        ))
        .await
        .expect("create work order");
    println!("created: id={} status={}", created.id, created.status);

    // (B) 一覧と件数ビュー
    let all = service.list().await.expect("list work orders");
    let counts = service.counts().await.expect("count work orders");
    println!(
        "listed {} record(s): open={} in_progress={} done={}",
        all.len(),
        counts.open,
        counts.in_progress,
        counts.done
    );

    // (C) 部分更新（status だけ。他のフィールドは据え置き、updatedAt は進む）
    sleep(Duration::from_millis(5)).await;
    let updated = service
        .update(
            &created.id.to_string(),
            WorkOrderPatch {
                status: Some("Done".to_string()),
                ..WorkOrderPatch::default()
            },
        )
        .await
        .expect("update work order")
        .expect("record exists");
    println!(
        "updated: status={} updated_at {} -> {}",
        updated.status, created.updated_at, updated.updated_at
    );
    println!(
        "record:\n{}",
        serde_json::to_string_pretty(&updated).expect("render record")
    );

    // (D) 削除して不在を確認（二度目の削除は false になる）
    let removed = service
        .remove(&created.id.to_string())
        .await
        .expect("remove work order");
    let gone = service
        .get(&created.id.to_string())
        .await
        .expect("get work order");
    println!("removed={removed} still_present={}", gone.is_some());
}
