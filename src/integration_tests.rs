#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::sync::mpsc::error::TryRecvError;

    use crate::actor_framework::FrameworkError;
    use crate::clients::{CatalogClient, ExpenditureClient, MaterialClient, OrderClient, ProjectClient, UserClient};
    use crate::domain::{
        Expenditure, MaterialInput, Order, Project, ShippingStatus, User, VendorMaterial, WarehouseMaterial,
    };
    use crate::material_actor::InventoryError;
    use crate::mock_framework::{
        create_mock_client, expect_action, expect_create, expect_delete, expect_get, expect_list,
    };
    use crate::notice::Notice;
    use crate::order_actor::{CartError, OrderAction, OrderActionResult};
    use crate::project_actor::ProjectAction;
    use crate::transport::Ack;
    use crate::user_actor::UserError;
    use crate::views::{CatalogBrowser, InventoryViewer, OrderComposer, OrderTracker, ProjectTracker, UserManager};

    fn ack(message: &str) -> Ack {
        Ack { message: Some(message.to_string()) }
    }

    #[tokio::test]
    async fn test_multi_vendor_cart_submits_one_order_per_vendor() {
        // 1. Setup Mocks
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner);
        let mut composer = OrderComposer::new(order_client.clone());
        let mut tracker = OrderTracker::new(order_client);

        composer.add_to_cart(VendorMaterial::new(11, "Cement", 9, 65_000.0, 40), 2).unwrap();
        composer.add_to_cart(VendorMaterial::new(12, "Sand", 4, 10_000.0, 40), 5).unwrap();
        composer.add_to_cart(VendorMaterial::new(13, "Brick", 9, 1_000.0, 900), 300).unwrap();

        // 2. Submit in background
        let submit_task = tokio::spawn(async move {
            let report = composer.submit_orders(&mut tracker).await;
            (composer, tracker, report)
        });

        // 3. Verify Interactions: vendor 4 first, each followed by a list refresh
        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.vendor_id, 4);
        assert_eq!(payload.items.len(), 1);
        assert_eq!((payload.items[0].material_id, payload.items[0].quantity), (12, 5));
        responder.send(Ok(ack("Order created"))).unwrap();

        let responder = expect_list(&mut order_rx).await.expect("Expected Order List");
        responder.send(Ok(vec![Order::new(1, 4, 50_000.0, ShippingStatus::Pending)])).unwrap();

        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.vendor_id, 9);
        assert_eq!(
            payload.items.iter().map(|line| line.material_id).collect::<Vec<_>>(),
            vec![11, 13]
        );
        responder.send(Ok(Ack::default())).unwrap();

        let responder = expect_list(&mut order_rx).await.expect("Expected Order List");
        responder
            .send(Ok(vec![
                Order::new(1, 4, 50_000.0, ShippingStatus::Pending),
                Order::new(2, 9, 430_000.0, ShippingStatus::Pending),
            ]))
            .unwrap();

        // 4. Verify Result
        let (composer, tracker, report) = submit_task.await.unwrap();
        let report = report.unwrap();
        assert!(report.is_complete());
        assert_eq!(report.submitted, vec![4, 9]);
        assert_eq!(
            report.notices,
            vec![Notice::Success("Order created".into()), Notice::Success("Order created successfully.".into())]
        );
        assert!(composer.cart().is_empty());
        assert_eq!(tracker.orders().len(), 2);
        assert!(matches!(order_rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn test_failed_vendor_group_stops_submission_and_keeps_rest_in_cart() {
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner);
        let mut composer = OrderComposer::new(order_client.clone());
        let mut tracker = OrderTracker::new(order_client);

        composer.add_to_cart(VendorMaterial::new(1, "Cement", 1, 65_000.0, 40), 1).unwrap();
        composer.add_to_cart(VendorMaterial::new(2, "Sand", 2, 10_000.0, 40), 1).unwrap();
        composer.add_to_cart(VendorMaterial::new(3, "Brick", 3, 1_000.0, 40), 1).unwrap();

        let submit_task = tokio::spawn(async move {
            let report = composer.submit_orders(&mut tracker).await;
            (composer, tracker, report)
        });

        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.vendor_id, 1);
        responder.send(Ok(Ack::default())).unwrap();
        let responder = expect_list(&mut order_rx).await.expect("Expected Order List");
        responder.send(Ok(vec![Order::new(1, 1, 65_000.0, ShippingStatus::Pending)])).unwrap();

        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.vendor_id, 2);
        responder
            .send(Err(FrameworkError::Rejected { status: 400, message: Some("Vendor is inactive".into()) }))
            .unwrap();

        let (composer, _tracker, report) = submit_task.await.unwrap();
        let report = report.unwrap();

        // No call for vendor 3, no rollback of vendor 1
        assert!(matches!(order_rx.try_recv(), Err(TryRecvError::Empty)));
        assert!(report.is_partial());
        assert_eq!(report.submitted, vec![1]);
        assert_eq!(report.failed, Some((2, Notice::Error("Vendor is inactive".into()))));
        assert_eq!(report.skipped, vec![3]);
        assert_eq!(
            composer.cart().items().iter().map(|item| item.material.vendor_id).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback_message() {
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner);
        let mut composer = OrderComposer::new(order_client.clone());
        let mut tracker = OrderTracker::new(order_client);
        composer.add_to_cart(VendorMaterial::new(1, "Cement", 1, 65_000.0, 40), 1).unwrap();

        let submit_task = tokio::spawn(async move { composer.submit_orders(&mut tracker).await });

        let (_, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        responder.send(Err(FrameworkError::Transport("connection reset".into()))).unwrap();

        let report = submit_task.await.unwrap().unwrap();
        assert_eq!(report.failed, Some((1, Notice::Error("Failed to create order.".into()))));
        assert!(!report.is_partial());
    }

    #[tokio::test]
    async fn test_empty_cart_issues_no_calls() {
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(order_client_inner);
        let mut composer = OrderComposer::new(order_client.clone());
        let mut tracker = OrderTracker::new(order_client);

        assert_eq!(composer.submit_orders(&mut tracker).await, Err(CartError::EmptyCart));
        assert!(matches!(order_rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn test_mark_received_only_for_delivered_orders() {
        let (order_client_inner, mut order_rx) = create_mock_client::<Order>(10);
        let mut tracker = OrderTracker::new(OrderClient::new(order_client_inner));

        let load_task = tokio::spawn(async move {
            tracker.load().await;
            tracker
        });
        let responder = expect_list(&mut order_rx).await.expect("Expected Order List");
        responder
            .send(Ok(vec![
                Order::new(7, 1, 10_000.0, ShippingStatus::Pending),
                Order::new(8, 1, 20_000.0, ShippingStatus::Delivered),
            ]))
            .unwrap();
        let mut tracker = load_task.await.unwrap();

        // Pending order: refused locally
        let notice = tracker.mark_received(7).await;
        assert!(notice.is_error());
        assert!(matches!(order_rx.try_recv(), Err(TryRecvError::Empty)));

        // Delivered order: receive, then refresh
        let receive_task = tokio::spawn(async move {
            let notice = tracker.mark_received(8).await;
            (tracker, notice)
        });
        let (id, action, responder) = expect_action(&mut order_rx).await.expect("Expected Order Action");
        assert_eq!((id, action), (8, OrderAction::Receive));
        responder.send(Ok(OrderActionResult::Received(ack("Order received")))).unwrap();

        let responder = expect_list(&mut order_rx).await.expect("Expected Order List");
        responder
            .send(Ok(vec![
                Order::new(7, 1, 10_000.0, ShippingStatus::Pending),
                Order::new(8, 1, 20_000.0, ShippingStatus::Received),
            ]))
            .unwrap();

        let (tracker, notice) = receive_task.await.unwrap();
        assert_eq!(notice, Notice::Success("Order received".into()));
        assert_eq!(tracker.find(8).and_then(|o| o.status().ok()), Some(ShippingStatus::Received));
    }

    fn project(id: u64, status: &str, materials: serde_json::Value) -> Project {
        serde_json::from_value(json!({
            "projectID": id,
            "nama_project": format!("Project {}", id),
            "status": status,
            "MaterialProyeks": materials
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_additional_materials_approval_flow() {
        let (project_client_inner, mut project_rx) = create_mock_client::<Project>(10);
        let mut projects = ProjectTracker::new(ProjectClient::new(project_client_inner));

        let in_progress = project(
            2,
            "In Progress",
            json!([
                { "materialProyekID": 1, "materialName": "Cement", "quantity": 10, "approved": true },
                { "materialProyekID": 2, "materialName": "Rebar", "quantity": 4, "approved": false }
            ]),
        );
        let load_task = tokio::spawn(async move {
            projects.load().await;
            projects
        });
        let responder = expect_list(&mut project_rx).await.expect("Expected Project List");
        responder
            .send(Ok(vec![project(1, "Pending", json!([])), in_progress.clone()]))
            .unwrap();
        let mut projects = load_task.await.unwrap();

        // Pending project has no materials to approve
        assert!(projects.approve_additional_materials(1).await.is_error());
        assert!(matches!(project_rx.try_recv(), Err(TryRecvError::Empty)));

        let approve_task = tokio::spawn(async move {
            let notice = projects.approve_additional_materials(2).await;
            (projects, notice)
        });
        let (id, action, responder) = expect_action(&mut project_rx).await.expect("Expected Project Action");
        assert_eq!((id, action), (2, ProjectAction::ApproveAdditionalMaterials));
        responder.send(Ok(Ack::default())).unwrap();

        let responder = expect_list(&mut project_rx).await.expect("Expected Project List");
        responder.send(Ok(vec![project(2, "In Progress", json!([]))])).unwrap();

        let (projects, notice) = approve_task.await.unwrap();
        assert_eq!(notice, Notice::Success("Additional materials approved.".into()));
        assert_eq!(projects.projects().len(), 1);
        assert!(!projects.projects()[0].has_pending_materials());
    }

    fn user(id: u64, role: &str) -> User {
        serde_json::from_value(json!({
            "UserID": id,
            "Username": format!("user{}", id),
            "Email": format!("user{}@hyperial.id", id),
            "Role": role
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_user_manager_hides_admins_and_reports_non_vendors() {
        let (user_client_inner, mut user_rx) = create_mock_client::<User>(10);
        let mut users = UserManager::new(UserClient::new(user_client_inner));

        let load_task = tokio::spawn(async move {
            users.load().await;
            users
        });
        let responder = expect_list(&mut user_rx).await.expect("Expected User List");
        responder
            .send(Ok(vec![user(1, "admin"), user(2, "vendor"), user(3, "ProjectManager")]))
            .unwrap();
        let mut users = load_task.await.unwrap();
        assert_eq!(users.users().iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 3]);

        users.set_search("USER3");
        assert_eq!(users.visible().len(), 1);

        let details_task = tokio::spawn(async move { users.vendor_details(3).await });
        let (id, responder) = expect_get(&mut user_rx).await.expect("Expected User Get");
        assert_eq!(id, 3);
        responder.send(Ok(Some(user(3, "ProjectManager")))).unwrap();
        assert_eq!(details_task.await.unwrap(), Err(UserError::NotAVendor(3)));
    }

    #[tokio::test]
    async fn test_project_approval_flow() {
        let (project_client_inner, mut project_rx) = create_mock_client::<Project>(10);
        let mut projects = ProjectTracker::new(ProjectClient::new(project_client_inner));

        let load_task = tokio::spawn(async move {
            projects.load().await;
            projects
        });
        let responder = expect_list(&mut project_rx).await.expect("Expected Project List");
        responder
            .send(Ok(vec![project(1, "Pending", json!([])), project(2, "Completed", json!([]))]))
            .unwrap();
        let mut projects = load_task.await.unwrap();

        // Completed project: refused locally
        let notice = projects.approve_project(2).await;
        assert!(notice.is_error());
        assert!(matches!(project_rx.try_recv(), Err(TryRecvError::Empty)));

        let approve_task = tokio::spawn(async move {
            let notice = projects.approve_project(1).await;
            (projects, notice)
        });
        let (id, action, responder) = expect_action(&mut project_rx).await.expect("Expected Project Action");
        assert_eq!((id, action), (1, ProjectAction::Approve));
        responder.send(Ok(ack("Project approved"))).unwrap();

        let responder = expect_list(&mut project_rx).await.expect("Expected Project List");
        responder
            .send(Ok(vec![project(1, "In Progress", json!([])), project(2, "Completed", json!([]))]))
            .unwrap();

        let (projects, notice) = approve_task.await.unwrap();
        assert_eq!(notice, Notice::Success("Project approved".into()));
        assert_eq!(projects.find(1).map(|p| p.progress_percent()), Some(50));
    }

    #[tokio::test]
    async fn test_catalog_load_search_and_failure() {
        let (catalog_client_inner, mut catalog_rx) = create_mock_client::<VendorMaterial>(10);
        let mut catalog = CatalogBrowser::new(CatalogClient::new(catalog_client_inner));

        let load_task = tokio::spawn(async move {
            catalog.load().await;
            catalog
        });
        let responder = expect_list(&mut catalog_rx).await.expect("Expected Catalog List");
        responder
            .send(Ok(vec![
                VendorMaterial::new(1, "Cement", 1, 65_000.0, 10),
                VendorMaterial::new(2, "Mattress", 2, 900_000.0, 3),
            ]))
            .unwrap();
        let mut catalog = load_task.await.unwrap();

        catalog.set_search("MAT");
        assert_eq!(catalog.visible().iter().map(|m| m.id).collect::<Vec<_>>(), vec![2]);
        assert!(catalog.find(1).is_some());

        let reload_task = tokio::spawn(async move {
            catalog.load().await;
            catalog
        });
        let responder = expect_list(&mut catalog_rx).await.expect("Expected Catalog List");
        responder.send(Err(FrameworkError::Transport("timeout".into()))).unwrap();
        let catalog = reload_task.await.unwrap();
        assert!(catalog.visible().is_empty());
    }

    fn stock(id: u64, name: &str, quantity: i64) -> WarehouseMaterial {
        WarehouseMaterial {
            id,
            name: name.to_string(),
            description: String::new(),
            unit: "sak".to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_inventory_delete_reloads_and_invalid_add_is_refused() {
        let (material_client_inner, mut material_rx) = create_mock_client::<WarehouseMaterial>(10);
        let (expenditure_client_inner, _expenditure_rx) = create_mock_client::<Expenditure>(10);
        let mut inventory = InventoryViewer::new(
            MaterialClient::new(material_client_inner),
            ExpenditureClient::new(expenditure_client_inner),
        );

        // Missing name: refused before any request
        let notice = inventory.add_material(MaterialInput { quantity: Some(3), ..Default::default() }).await;
        assert_eq!(notice, Notice::Error("Material name is required".into()));
        assert!(matches!(material_rx.try_recv(), Err(TryRecvError::Empty)));

        let delete_task = tokio::spawn(async move {
            let notice = inventory.delete_material(4).await;
            (inventory, notice)
        });
        let (id, responder) = expect_delete(&mut material_rx).await.expect("Expected Material Delete");
        assert_eq!(id, 4);
        responder.send(Ok(Ack::default())).unwrap();

        let responder = expect_list(&mut material_rx).await.expect("Expected Material List");
        responder.send(Ok(vec![stock(1, "Cement", 12), stock(2, "Rebar", 0)])).unwrap();

        let (mut inventory, notice) = delete_task.await.unwrap();
        assert_eq!(notice, Notice::Success("Material deleted.".into()));
        inventory.set_search("rebar");
        assert_eq!(inventory.visible().iter().map(|m| m.id).collect::<Vec<_>>(), vec![2]);

        let show_task = tokio::spawn(async move { inventory.material(9).await });
        let (id, responder) = expect_get(&mut material_rx).await.expect("Expected Material Get");
        assert_eq!(id, 9);
        responder.send(Ok(None)).unwrap();
        assert_eq!(show_task.await.unwrap(), Err(InventoryError::NotFound(9)));
    }
}
