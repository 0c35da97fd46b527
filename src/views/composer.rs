use std::collections::BTreeMap;

use tracing::{debug, info, instrument, warn};

use crate::clients::OrderClient;
use crate::domain::{NewOrder, OrderLine, VendorId, VendorMaterial};
use crate::notice::Notice;
use crate::order_actor::CartError;
use crate::views::OrderTracker;

const ORDER_FAILED: &str = "Failed to create order.";
const ORDER_CREATED: &str = "Order created successfully.";

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub material: VendorMaterial,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.material.price * f64::from(self.quantity)
    }
}

/// Materials picked for ordering, possibly from several vendors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Partitions the cart by vendor, ascending by vendor id. Each item lands
    /// in exactly one group and keeps its cart order within the group.
    pub fn group_by_vendor(&self) -> BTreeMap<VendorId, Vec<&CartItem>> {
        let mut groups: BTreeMap<VendorId, Vec<&CartItem>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.material.vendor_id).or_default().push(item);
        }
        groups
    }

    fn retain_vendors_except(&mut self, submitted: &[VendorId]) {
        self.items.retain(|item| !submitted.contains(&item.material.vendor_id));
    }
}

/// What happened to each vendor group of one submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionReport {
    /// Vendors whose order was created, in submission order.
    pub submitted: Vec<VendorId>,
    /// The vendor whose order failed, and why. Submission stops there.
    pub failed: Option<(VendorId, Notice)>,
    /// Vendors never attempted because an earlier group failed.
    pub skipped: Vec<VendorId>,
    pub notices: Vec<Notice>,
}

impl SubmissionReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_none()
    }

    /// Some groups went through and at least one did not.
    pub fn is_partial(&self) -> bool {
        !self.submitted.is_empty() && self.failed.is_some()
    }
}

/// Builds a multi-vendor cart and turns it into one order per vendor.
pub struct OrderComposer {
    client: OrderClient,
    cart: Cart,
}

impl OrderComposer {
    pub fn new(client: OrderClient) -> Self {
        Self { client, cart: Cart::default() }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, material: VendorMaterial, quantity: i64) -> Result<(), CartError> {
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(CartError::InvalidQuantity(quantity))?;
        if !material.in_stock() {
            return Err(CartError::OutOfStock(material.id));
        }
        info!(material_id = material.id, vendor_id = material.vendor_id, quantity, "Added to cart");
        self.cart.items.push(CartItem { material, quantity });
        Ok(())
    }

    /// Submits one order per vendor, one after the other. After each created
    /// order the tracker re-fetches the order list. The first failure stops
    /// the loop; orders already created stay created. Submitted groups leave
    /// the cart, the rest remain for a retry.
    #[instrument(skip(self, tracker))]
    pub async fn submit_orders(&mut self, tracker: &mut OrderTracker) -> Result<SubmissionReport, CartError> {
        if self.cart.is_empty() {
            return Err(CartError::EmptyCart);
        }
        debug!(items = self.cart.len(), "Submitting cart");

        let groups: Vec<NewOrder> = self
            .cart
            .group_by_vendor()
            .into_iter()
            .map(|(vendor_id, items)| NewOrder {
                vendor_id,
                items: items
                    .into_iter()
                    .map(|item| OrderLine { material_id: item.material.id, quantity: item.quantity })
                    .collect(),
            })
            .collect();

        let mut report = SubmissionReport::default();
        let mut pending = groups.into_iter();
        for order in pending.by_ref() {
            let vendor_id = order.vendor_id;
            match self.client.create_order(order).await {
                Ok(ack) => {
                    report.submitted.push(vendor_id);
                    report.notices.push(Notice::success(&ack, ORDER_CREATED));
                    tracker.load().await;
                }
                Err(e) => {
                    warn!(vendor_id, error = %e, "Stopping submission");
                    let notice = Notice::failure(&e, ORDER_FAILED);
                    report.notices.push(notice.clone());
                    report.failed = Some((vendor_id, notice));
                    break;
                }
            }
        }
        report.skipped = pending.map(|order| order.vendor_id).collect();

        self.cart.retain_vendors_except(&report.submitted);
        if report.is_partial() {
            report.notices.push(Notice::Error(format!(
                "Only {} of {} vendor orders were created; the rest remain in the cart.",
                report.submitted.len(),
                report.submitted.len() + 1 + report.skipped.len()
            )));
        }
        info!(
            submitted = report.submitted.len(),
            skipped = report.skipped.len(),
            failed = report.failed.is_some(),
            "Submission finished"
        );
        Ok(report)
    }
}
